use crate::convert::converter::{filter_txt, image_to_greyscale, image_to_txt, txt_to_image, KernelKind};
use crate::convert::error::FilterError;
use log::warn;
use std::path::{Path, PathBuf};

pub const USAGE: &str = "Usage: image_filter option input_file";

/// Options shared by every handler.
#[derive(Clone, Copy, Debug, Default)]
pub struct Settings {
    pub kernel: KernelKind,
}

/// Runs one operation on the input file and returns the written path.
pub type Handler = fn(&Path, &Settings) -> Result<PathBuf, FilterError>;

fn greyscale(path: &Path, _: &Settings) -> Result<PathBuf, FilterError> {
    image_to_greyscale(path)
}

fn dump(path: &Path, _: &Settings) -> Result<PathBuf, FilterError> {
    image_to_txt(path)
}

fn restore(path: &Path, _: &Settings) -> Result<PathBuf, FilterError> {
    txt_to_image(path)
}

fn filter(path: &Path, settings: &Settings) -> Result<PathBuf, FilterError> {
    filter_txt(path, settings.kernel)
}

/// Maps option flags such as `-g` to their handlers.
pub struct CommandTable {
    entries: Vec<(&'static str, &'static str, Handler)>,
}

impl CommandTable {
    pub fn new() -> Self {
        CommandTable {
            entries: vec![
                ("-g", "write <name>_g.<ext>, the image in greyscale", greyscale as Handler),
                ("-i", "write <name>.txt, the greyscale pixel grid", dump as Handler),
                ("-o", "write <name>_filtered.jpg from a pixel grid", restore as Handler),
                ("-f", "write <name>_f.txt, the pixel grid after --kernel", filter as Handler),
            ],
        }
    }

    pub fn lookup(&self, option: &str) -> Option<Handler> {
        self.entries
            .iter()
            .find(|(flag, _, _)| *flag == option)
            .map(|&(_, _, handler)| handler)
    }

    /// Dispatches `option`. Unknown options do nothing and yield `Ok(None)`.
    pub fn run(
        &self,
        option: &str,
        path: &Path,
        settings: &Settings,
    ) -> Result<Option<PathBuf>, FilterError> {
        match self.lookup(option) {
            Some(handler) => handler(path, settings).map(Some),
            None => {
                warn!("Ignoring unrecognized option '{}'", option);
                Ok(None)
            }
        }
    }

    /// One line per option, for help output.
    pub fn describe(&self) -> String {
        self.entries
            .iter()
            .map(|(flag, about, _)| format!("  {}  {}", flag, about))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knows_every_option() {
        let table = CommandTable::new();
        for flag in ["-g", "-i", "-o", "-f"] {
            assert!(table.lookup(flag).is_some(), "{}", flag);
        }
        assert!(table.lookup("-x").is_none());
        assert!(table.lookup("g").is_none());
    }

    #[test]
    fn unknown_option_does_nothing() {
        let table = CommandTable::new();
        let result = table
            .run("-x", Path::new("missing.png"), &Settings::default())
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn known_option_propagates_failures() {
        let table = CommandTable::new();
        let err = table
            .run("-g", Path::new("no_extension"), &Settings::default())
            .unwrap_err();
        assert!(matches!(err, FilterError::InvalidFileName(_)));
    }

    #[test]
    fn describes_options() {
        let text = CommandTable::new().describe();
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("-o  write <name>_filtered.jpg"));
    }
}
