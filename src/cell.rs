// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

use crate::{Dimension, Direction, Result};

/// A physical primitive of the pad ring, such as a bond pad, an IO cell or a
/// corner cell. Cloning a cell gives an independent copy; pins and pads each
/// hold their own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    name: String,
    dimension: Dimension,
    connections: Vec<String>,
    wrapper: String,
}

/// A field of a [`Cell`] to overwrite with [`Cell::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum CellField {
    Name(String),
    Width(f64),
    Height(f64),
    Connections(Vec<String>),
    Wrapper(String),
}

impl Cell {
    /// Creates a cell with the given name in the PDK and its width and height
    /// from the PDK's LEF.
    pub fn new(name: impl AsRef<str>, width: f64, height: f64) -> Result<Self> {
        Ok(Cell {
            name: name.as_ref().to_string(),
            dimension: Dimension::new(width, height)?,
            connections: Vec::new(),
            wrapper: String::new(),
        })
    }

    /// Sets the cell's own pins that get tied to the signal when the cell is
    /// instantiated, e.g. `["io"]`.
    pub fn with_connections<I, S>(mut self, connections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.connections = connections
            .into_iter()
            .map(|c| c.as_ref().to_string())
            .collect();
        self
    }

    /// Sets the name of the RTL wrapper module around this cell.
    pub fn with_wrapper(mut self, wrapper: impl AsRef<str>) -> Self {
        self.wrapper = wrapper.as_ref().to_string();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn width(&self) -> f64 {
        self.dimension.width()
    }

    pub fn height(&self) -> f64 {
        self.dimension.height()
    }

    pub fn connections(&self) -> &[String] {
        &self.connections
    }

    pub fn wrapper(&self) -> &str {
        &self.wrapper
    }

    /// Overwrites the given fields in order. Each change is logged as
    /// `old -> new`, at info level when `verbose` is set and at debug level
    /// otherwise. A width or height that fails validation leaves the cell
    /// with the updates applied before it.
    pub fn update<I>(&mut self, fields: I, verbose: bool) -> Result<&mut Self>
    where
        I: IntoIterator<Item = CellField>,
    {
        let level = if verbose {
            log::Level::Info
        } else {
            log::Level::Debug
        };
        for field in fields {
            match field {
                CellField::Name(name) => {
                    log::log!(level, "Updating cell name from {} to {}", self.name, name);
                    self.name = name;
                }
                CellField::Width(width) => {
                    log::log!(
                        level,
                        "Updating {}: width from {} to {}",
                        self.name,
                        self.dimension.width(),
                        width
                    );
                    self.dimension = Dimension::new(width, self.dimension.height())?;
                }
                CellField::Height(height) => {
                    log::log!(
                        level,
                        "Updating {}: height from {} to {}",
                        self.name,
                        self.dimension.height(),
                        height
                    );
                    self.dimension = Dimension::new(self.dimension.width(), height)?;
                }
                CellField::Connections(connections) => {
                    log::log!(
                        level,
                        "Updating {}: connections from {:?} to {:?}",
                        self.name,
                        self.connections,
                        connections
                    );
                    self.connections = connections;
                }
                CellField::Wrapper(wrapper) => {
                    log::log!(
                        level,
                        "Updating {}: wrapper from {:?} to {:?}",
                        self.name,
                        self.wrapper,
                        wrapper
                    );
                    self.wrapper = wrapper;
                }
            }
        }
        Ok(self)
    }
}

/// Cell templates that pins copy from when they are created.
#[derive(Debug, Clone, PartialEq)]
pub struct CellLibrary {
    pub bondpad_digital: Cell,
    pub bondpad_analog: Cell,
    pub iocell_digital: Cell,
    pub iocell_analog: Cell,
    /// RTL wrapper of a digital IO cell used as an input.
    pub input_wrapper: String,
    /// RTL wrapper of a digital IO cell used as an output.
    pub output_wrapper: String,
    /// RTL wrapper of a digital IO cell used as an inout.
    pub inout_wrapper: String,
}

impl Default for CellLibrary {
    fn default() -> Self {
        CellLibrary {
            bondpad_digital: Cell::stock("BONDPAD_DIGITAL", 20.0, 30.0),
            bondpad_analog: Cell::stock("BONDPAD_ANALOG", 20.0, 30.0),
            // Digital connections are tied off by the pad ring template.
            iocell_digital: Cell::stock("IOCELL_DIGITAL", 25.0, 32.0),
            iocell_analog: Cell::stock("IOCELL_ANALOG", 20.0, 32.0)
                .with_wrapper("u_pad_cell_analog")
                .with_connections(["io"]),
            input_wrapper: "u_pad_cell_input".to_string(),
            output_wrapper: "u_pad_cell_output".to_string(),
            inout_wrapper: "u_pad_cell_inout".to_string(),
        }
    }
}

impl CellLibrary {
    /// Returns fresh copies of the IO cell and bond pad for a pin with the
    /// given direction.
    pub fn cells_for(&self, direction: Direction) -> (Cell, Cell) {
        let wrapper = match direction {
            Direction::Analog => {
                return (self.iocell_analog.clone(), self.bondpad_analog.clone());
            }
            Direction::Input => &self.input_wrapper,
            Direction::Output => &self.output_wrapper,
            Direction::Inout => &self.inout_wrapper,
        };
        (
            self.iocell_digital.clone().with_wrapper(wrapper),
            self.bondpad_digital.clone(),
        )
    }
}

impl Cell {
    fn stock(name: &str, width: f64, height: f64) -> Self {
        Cell {
            name: name.to_string(),
            dimension: Dimension::new_unchecked(width, height),
            connections: Vec::new(),
            wrapper: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_overwrites_fields() {
        let mut cell = Cell::new("IOCELL", 25.0, 32.0).unwrap();
        cell.update(
            [
                CellField::Width(30.0),
                CellField::Wrapper("u_wrap".into()),
                CellField::Connections(vec!["pad".into()]),
            ],
            true,
        )
        .unwrap();
        assert_eq!(cell.width(), 30.0);
        assert_eq!(cell.height(), 32.0);
        assert_eq!(cell.wrapper(), "u_wrap");
        assert_eq!(cell.connections(), ["pad".to_string()]);
    }

    #[test]
    fn update_rejects_negative_height() {
        let mut cell = Cell::new("IOCELL", 25.0, 32.0).unwrap();
        assert!(cell.update([CellField::Height(-1.0)], false).is_err());
        assert_eq!(cell.height(), 32.0);
    }

    #[test]
    fn library_cells_are_independent_copies() {
        let lib = CellLibrary::default();
        let (mut iocell, _) = lib.cells_for(Direction::Input);
        assert_eq!(iocell.wrapper(), "u_pad_cell_input");
        iocell
            .update([CellField::Name("CUSTOM".into())], false)
            .unwrap();
        assert_eq!(lib.iocell_digital.name(), "IOCELL_DIGITAL");
        assert_eq!(lib.iocell_digital.wrapper(), "");
    }

    #[test]
    fn analog_cells_keep_their_wrapper() {
        let (iocell, bondpad) = CellLibrary::default().cells_for(Direction::Analog);
        assert_eq!(iocell.name(), "IOCELL_ANALOG");
        assert_eq!(iocell.wrapper(), "u_pad_cell_analog");
        assert_eq!(iocell.connections(), ["io".to_string()]);
        assert_eq!(bondpad.name(), "BONDPAD_ANALOG");
    }
}
