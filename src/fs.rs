use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{self, prelude::*};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ConvertErr {
    Read { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
}

impl Display for ConvertErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConvertErr::Read { path, source } => {
                write!(f, "Can't read {}: {}", path.display(), source)
            }
            ConvertErr::Write { path, source } => {
                write!(f, "Can't write {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for ConvertErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConvertErr::Read { source, .. } | ConvertErr::Write { source, .. } => Some(source),
        }
    }
}

/// The file is closed when this returns, error or not.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String, ConvertErr> {
    let path = path.as_ref();
    let err = |source| ConvertErr::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(err)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(err)?;
    Ok(contents)
}

pub fn write_file<P: AsRef<Path>>(path: P, text: &str) -> Result<(), ConvertErr> {
    let path = path.as_ref();
    let err = |source| ConvertErr::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(err)?;
    file.write_all(text.as_bytes()).map_err(err)?;
    Ok(())
}
