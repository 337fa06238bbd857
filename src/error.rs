/// Contract violations on the linear containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContainerError {
    /// Pop or peek on an empty container
    #[error("container underflow: the container is empty")]
    Underflow,
    /// Push into a bounded container that is already full
    #[error("container overflow: capacity of {capacity} reached")]
    Overflow { capacity: usize },
}
