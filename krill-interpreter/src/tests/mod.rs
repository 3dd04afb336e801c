//! Interpreter crate tests: static analysis, builtin actions, evaluation,
//! and the full per-line pipeline.

pub mod test_analyzer;
pub mod test_evaluator;

use crate::Session;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Output sink that keeps a shared handle on everything written, so tests
/// can inspect what builtins sent outward.
#[derive(Clone, Default)]
pub struct CaptureBuffer(Rc<RefCell<Vec<u8>>>);

impl CaptureBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A session whose output is captured instead of going to stdout.
pub fn capture_session() -> (Session, CaptureBuffer) {
    let buffer = CaptureBuffer::default();
    let session = Session::with_writer(Box::new(buffer.clone()));
    (session, buffer)
}
