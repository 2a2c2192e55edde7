use crate::domain::model::{Region, Vehicle, VehicleKind};
use crate::domain::ports::{Output, VehicleFactory};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionalFactory {
    region: Region,
}

impl RegionalFactory {
    pub fn new(region: Region) -> Self {
        Self { region }
    }

    fn build(&self, kind: VehicleKind, make: &str, model: &str) -> Vehicle {
        Vehicle {
            make: make.to_string(),
            model: model.to_string(),
            region_spec: self.region.spec_label().to_string(),
            kind,
        }
    }
}

impl VehicleFactory for RegionalFactory {
    fn create_car(&self, make: &str, model: &str) -> Vehicle {
        self.build(VehicleKind::Car, make, model)
    }

    fn create_motorcycle(&self, make: &str, model: &str) -> Vehicle {
        self.build(VehicleKind::Motorcycle, make, model)
    }
}

impl Vehicle {
    pub fn start_engine<O: Output + ?Sized>(&self, out: &mut O) -> Result<()> {
        out.emit(&self.engine_message())
    }
}

/// Showroom line-up per region: (car make, car model, bike make, bike model).
fn lineup(region: Region) -> (&'static str, &'static str, &'static str, &'static str) {
    match region {
        Region::Us => ("Ford", "Mustang", "Harley-Davidson", "Sportster"),
        Region::Eu => ("Toyota", "Corolla", "Ducati", "Panigale"),
    }
}

pub fn run_demo_for<O: Output + ?Sized>(region: Region, out: &mut O) -> Result<()> {
    let factory = RegionalFactory::new(region);
    let (car_make, car_model, bike_make, bike_model) = lineup(region);

    tracing::debug!("Starting {} line-up", region.spec_label());
    factory.create_car(car_make, car_model).start_engine(out)?;
    factory
        .create_motorcycle(bike_make, bike_model)
        .start_engine(out)?;
    Ok(())
}

pub fn run_demo<O: Output + ?Sized>(out: &mut O) -> Result<()> {
    for region in Region::ALL {
        run_demo_for(region, out)?;
    }
    Ok(())
}
