use crate::domain::policy::MovedConfig;
use std::cell::{RefCell, RefMut};

/// Owns the output writer and the moved-line detection configuration shared
/// by the diff commands.
pub struct Renderer {
    writer: RefCell<Box<dyn std::io::Write>>,
    moved: Option<MovedConfig>,
}

impl Renderer {
    pub fn new(writer: Box<dyn std::io::Write>, moved: Option<MovedConfig>) -> Self {
        Renderer {
            writer: RefCell::new(writer),
            moved,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn moved(&self) -> Option<&MovedConfig> {
        self.moved.as_ref()
    }
}
