//! Shared collaborators for tests and benchmarks: a tempfile-backed program
//! file and a handful of readers and writers for exercising the machine's
//! I/O paths without touching real streams.

use std::cell::RefCell;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::rc::Rc;
use tempfile::NamedTempFile;

/// A known program with a known result: prints "hello world" when run with a
/// tape of 100 cells and no input.
pub const HELLO_WORLD_PROGRAM: &str =
    "+[-[<<[+[--->]-[<<<]]]>>>-]>-.---.>..>.<<<<-.<+.>>>>>.>.<<.<-.";
pub const HELLO_WORLD_OUTPUT: &[u8] = b"hello world";

/// A temporary file holding [`HELLO_WORLD_PROGRAM`], readable from the start.
pub struct TestFile {
    file: NamedTempFile,
}

impl TestFile {
    pub fn new() -> io::Result<Self> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{}", HELLO_WORLD_PROGRAM)?;

        // Seek back to the start so the file reads as a fresh program
        file.seek(SeekFrom::Start(0))?;
        Ok(TestFile { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl Read for TestFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // Need to borrow it mutably to perform reads
        self.file.as_file_mut().read(buf)
    }
}

/// Swallows everything and reports success.
pub struct NullWriter;

impl Write for NullWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Fails every write, for exercising the output error path.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink is broken"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink is broken"))
    }
}

/// Fails every read with something other than end-of-stream, for exercising
/// the input error path.
pub struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(
            io::ErrorKind::ConnectionReset,
            "source is broken",
        ))
    }
}

/// A cloneable in-memory sink. The machine owns one clone while the test
/// keeps another to read the output back afterwards.
#[derive(Clone, Default)]
pub struct SharedSink {
    buffer: Rc<RefCell<Vec<u8>>>,
}

impl SharedSink {
    pub fn new() -> Self {
        SharedSink::default()
    }

    pub fn contents(&self) -> Vec<u8> {
        self.buffer.borrow().clone()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
