use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Free text, never parsed.
    pub year: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Year: {}",
            self.title, self.author, self.year
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Region {
    Us,
    Eu,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Us, Region::Eu];

    pub fn spec_label(self) -> &'static str {
        match self {
            Region::Us => "US Spec",
            Region::Eu => "EU Spec",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Car,
    Motorcycle,
}

impl VehicleKind {
    fn started_word(self) -> &'static str {
        match self {
            VehicleKind::Car => "Engine",
            VehicleKind::Motorcycle => "Motor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    pub region_spec: String,
    pub kind: VehicleKind,
}

impl Vehicle {
    pub fn engine_message(&self) -> String {
        format!(
            "{} {} ({}): {} started",
            self.make,
            self.model,
            self.region_spec,
            self.kind.started_word()
        )
    }
}
