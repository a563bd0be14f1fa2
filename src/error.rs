//! 错误处理

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // 标准库错误处理
    #[error("io error, {0}")]
    Io(std::io::Error),

    #[error("serde json error, {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("invalid style file, {0}")]
    InvalidStyleFile(String),
    #[error("invalid style record, {0}")]
    InvalidStyleRecord(String),
    #[error("node not found, {0}")]
    NodeNotFound(String),

    #[cfg(feature = "python")]
    #[error("py error, {0}")]
    PyErr(#[from] pyo3::PyErr),
    #[cfg(feature = "python")]
    #[error("pythonize error, {0}")]
    PythonizeError(#[from] pythonize::PythonizeError),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
