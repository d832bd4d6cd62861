//! Redirection adapter
//!
//! Turns a console-style [`Solution`] into a plain bytes-in, `String`-out call. The
//! solution's standard input and output are a pair of stream bindings; for the
//! duration of one call they are swapped for an in-memory reader seeded with
//! the input and an in-memory capture buffer. A [`Redirection`] guard puts the
//! previous bindings back when it goes out of scope, so the swap is undone on
//! success, on a returned error and while unwinding from a panic alike.

use std::cell::RefCell;
use std::io::{self, BufRead, BufReader, Cursor, Write};
use std::mem;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use crate::error::{AppResult, HarnessError};
use crate::solution::Solution;

/// The reader/writer pair a solution sees as its standard streams
pub struct StreamBindings {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl StreamBindings {
    pub fn new(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self { input, output }
    }

    /// Bindings to the real process stdin/stdout
    pub fn process() -> Self {
        Self::new(Box::new(BufReader::new(io::stdin())), Box::new(io::stdout()))
    }

    pub fn input(&mut self) -> &mut dyn BufRead {
        self.input.as_mut()
    }

    pub fn output(&mut self) -> &mut dyn Write {
        self.output.as_mut()
    }

    /// Substitute both streams until the returned guard is dropped
    pub fn redirect(&mut self, input: Box<dyn BufRead>, output: Box<dyn Write>) -> Redirection<'_> {
        let previous_input = mem::replace(&mut self.input, input);
        let previous_output = mem::replace(&mut self.output, output);

        Redirection {
            bindings: self,
            previous: Some((previous_input, previous_output)),
        }
    }
}

/// Scoped substitution of a [`StreamBindings`] pair
pub struct Redirection<'a> {
    bindings: &'a mut StreamBindings,
    previous: Option<(Box<dyn BufRead>, Box<dyn Write>)>,
}

impl Redirection<'_> {
    /// The substituted streams
    pub fn streams(&mut self) -> (&mut dyn BufRead, &mut dyn Write) {
        (self.bindings.input.as_mut(), self.bindings.output.as_mut())
    }
}

impl Drop for Redirection<'_> {
    fn drop(&mut self) {
        if let Some((input, output)) = self.previous.take() {
            self.bindings.input = input;
            let mut substituted = mem::replace(&mut self.bindings.output, output);
            if let Err(e) = substituted.flush() {
                tracing::warn!("Failed to flush redirected output: {}", e);
            }
        }
    }
}

/// Growable in-memory sink that stays readable after being handed out as a writer
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer(Rc<RefCell<Vec<u8>>>);

impl CaptureBuffer {
    pub fn contents(&self) -> Vec<u8> {
        self.0.borrow().clone()
    }

    /// Drain the captured bytes as UTF-8
    pub fn take_string(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.0.take())
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

/// Exposes a [`Solution`] as a string-to-string function
pub struct RedirectionAdapter<S> {
    solution: S,
    bindings: StreamBindings,
}

impl<S: Solution> RedirectionAdapter<S> {
    /// Adapter whose resting bindings are the process's own streams
    pub fn new(solution: S) -> Self {
        Self::with_bindings(solution, StreamBindings::process())
    }

    pub fn with_bindings(solution: S, bindings: StreamBindings) -> Self {
        Self { solution, bindings }
    }

    pub fn solution(&self) -> &S {
        &self.solution
    }

    /// Bindings in effect outside of [`run_solution`](Self::run_solution)
    pub fn bindings_mut(&mut self) -> &mut StreamBindings {
        &mut self.bindings
    }

    /// Run the solution once with `input` as its stdin and return its stdout
    ///
    /// `input` is opaque bytes; the solution decides what it can parse.
    pub fn run_solution(&mut self, input: impl AsRef<[u8]>) -> AppResult<String> {
        let captured = CaptureBuffer::default();
        let solution = &self.solution;

        let outcome = {
            let mut redirection = self.bindings.redirect(
                Box::new(Cursor::new(input.as_ref().to_vec())),
                Box::new(captured.clone()),
            );
            let (reader, writer) = redirection.streams();

            panic::catch_unwind(AssertUnwindSafe(|| solution.solve(reader, writer)))
        };

        match outcome {
            Ok(Ok(())) => Ok(captured.take_string()?),
            Ok(Err(e)) => Err(e.into()),
            Err(payload) => Err(HarnessError::Panicked(panic_message(payload.as_ref()))),
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
