use std::{
    fs::File,
    io::{self, BufWriter, Read as _, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    /// Writes a rendered result body as-is.
    pub fn write_body(&mut self, body: &str) -> anyhow::Result<()> {
        writeln!(self, "{body}")
            .with_context(|| format!("Failed to write output to {}", self.display_path()))?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }

    /// Writes the full saved report: timestamp, the dataset as the user
    /// typed it, and the rendered output.
    pub fn write_report(&mut self, dataset: &str, body: &str) -> anyhow::Result<()> {
        let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let report = format!("Generated: {stamp}\n\nDataset:\n{dataset}\n\nOutput:\n{body}");
        self.write_body(&report)
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// Joins values for display the way the dataset field expects them back,
/// comma separated.
pub fn comma_join<T>(items: &[T]) -> String
where
    T: std::fmt::Display,
{
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reads free-form input text from a file, or from stdin when no path is
/// given.
pub fn read_text_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
