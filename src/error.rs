use std::path::PathBuf;

/// Failure while turning vector bytes into an encoded raster
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("source is not a valid SVG document")]
    Parse(#[from] usvg::Error),
    #[error("cannot allocate a {size}x{size} canvas")]
    Canvas { size: u32 },
    #[error("PNG encoding failed")]
    Encode(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Everything that can stop an icon run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read source image '{}'", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot render the {size}x{size} icon")]
    Render {
        size: u32,
        #[source]
        source: RenderError,
    },
    #[error("cannot write '{}'", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} icon size(s) failed: {}", .failures.len(), describe(.failures))]
    Incomplete { failures: Vec<Failure> },
}

/// One size that could not be produced when the run keeps going after errors
#[derive(Debug)]
pub struct Failure {
    pub size: u32,
    pub error: Error,
}

fn describe(failures: &[Failure]) -> String {
    failures
        .iter()
        .map(|f| format!("{}: {}", f.size, f.error))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Problems with the optional config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
