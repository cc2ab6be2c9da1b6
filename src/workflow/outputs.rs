use super::commands::format_command;
use crate::error::Error;
use crate::github::ReleaseResult;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// Where step outputs go: the `GITHUB_OUTPUT` file when the runner provides
/// one, the legacy `set-output` command otherwise.
#[derive(Debug, Clone)]
pub enum OutputWriter {
    File(PathBuf),
    Stdout,
}

impl OutputWriter {
    pub fn new(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => OutputWriter::File(path),
            None => OutputWriter::Stdout,
        }
    }

    /// Writes all outputs at once; on error nothing has been written.
    pub fn set_all(&self, outputs: &[(&str, String)]) -> Result<(), Error> {
        self.write_outputs(outputs, delimiter)
    }

    pub fn set_release(&self, release: &ReleaseResult) -> Result<(), Error> {
        self.set_all(&release_outputs(release))
    }

    fn write_outputs(
        &self,
        outputs: &[(&str, String)],
        new_delimiter: fn() -> String,
    ) -> Result<(), Error> {
        let rendered = self.render(outputs, new_delimiter)?;
        match self {
            OutputWriter::File(path) => {
                let write_error = |source| Error::OutputFile {
                    path: path.clone(),
                    source,
                };
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(write_error)?;
                file.write_all(rendered.as_bytes()).map_err(write_error)?;
            }
            OutputWriter::Stdout => print!("{rendered}"),
        }

        for (name, value) in outputs {
            tracing::debug!(name, value = %value, "output set");
        }
        Ok(())
    }

    fn render(
        &self,
        outputs: &[(&str, String)],
        new_delimiter: fn() -> String,
    ) -> Result<String, Error> {
        let mut rendered = String::new();
        for (name, value) in outputs {
            match self {
                OutputWriter::File(_) => {
                    rendered.push_str(&file_entry(name, value, &new_delimiter())?);
                }
                OutputWriter::Stdout => {
                    rendered.push_str(&format_command("set-output", &[("name", *name)], value));
                    rendered.push('\n');
                }
            }
        }
        Ok(rendered)
    }
}

pub fn release_outputs(release: &ReleaseResult) -> [(&'static str, String); 3] {
    [
        ("id", release.id.to_string()),
        ("html_url", release.html_url.clone()),
        ("upload_url", release.upload_url.clone()),
    ]
}

fn delimiter() -> String {
    format!("ghadelimiter_{}", Uuid::new_v4())
}

fn file_entry(name: &str, value: &str, delimiter: &str) -> Result<String, Error> {
    if !name.contains('\n') && !value.contains('\n') && !value.contains('\r') {
        return Ok(format!("{name}={value}\n"));
    }

    if name.contains(delimiter) || value.contains(delimiter) {
        return Err(Error::Output {
            name: name.to_string(),
            reason: format!("value must not contain the delimiter {delimiter}"),
        });
    }

    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}
