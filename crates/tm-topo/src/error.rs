use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopoError {
    #[error("node name {0:?} is already in the map")]
    DuplicateName(String),
}

pub type TopoResult<T> = Result<T, TopoError>;
