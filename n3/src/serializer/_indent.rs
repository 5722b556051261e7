// this module is transparently re-exported by its parent `serializer`
use std::io;

/// A writer keeping track of the current row and column,
/// and starting every new line at the current indentation.
///
/// Columns and rows start at 0, and columns count characters (not bytes).
#[derive(Clone, Debug)]
pub struct IndentedWriter<W> {
    write: W,
    column: usize,
    row: usize,
    indent: usize,
}

impl<W: io::Write> IndentedWriter<W> {
    /// Wrap `write`, with no indentation.
    pub fn new(write: W) -> Self {
        IndentedWriter {
            write,
            column: 0,
            row: 0,
            indent: 0,
        }
    }

    /// The column where the next character will be written.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The row where the next character will be written.
    pub fn row(&self) -> usize {
        self.row
    }

    /// The column where new lines start.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Write `text` as is.
    ///
    /// Line breaks inside `text` are counted, but not indented.
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.write.write_all(text.as_bytes())?;
        match text.rfind('\n') {
            Some(pos) => {
                self.row += text.matches('\n').count();
                self.column = text[pos + 1..].chars().count();
            }
            None => self.column += text.chars().count(),
        }
        Ok(())
    }

    /// Start a new line, at the current indentation.
    pub fn newline(&mut self) -> io::Result<()> {
        self.write.write_all(b"\n")?;
        self.row += 1;
        self.column = 0;
        self.spaces(self.indent)
    }

    /// Write spaces until `column` is reached (nothing if it is already passed).
    pub fn pad_to(&mut self, column: usize) -> io::Result<()> {
        self.spaces(column.saturating_sub(self.column))
    }

    /// Write `n` spaces.
    pub fn spaces(&mut self, n: usize) -> io::Result<()> {
        write!(self.write, "{:n$}", "")?;
        self.column += n;
        Ok(())
    }

    /// Set the column where new lines start, returning the previous one.
    pub fn set_indent(&mut self, indent: usize) -> usize {
        std::mem::replace(&mut self.indent, indent)
    }

    /// Run `f` with the indentation set to `indent`.
    ///
    /// The previous indentation is restored afterwards, even if `f` fails.
    pub fn with_indent<T, F>(&mut self, indent: usize, f: F) -> io::Result<T>
    where
        F: FnOnce(&mut Self) -> io::Result<T>,
    {
        let saved = self.set_indent(indent);
        let ret = f(self);
        self.set_indent(saved);
        ret
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.write.flush()
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.write
    }
}
