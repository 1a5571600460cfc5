use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("no node stores the requested interval")]
    KeyNotFound,

    #[error("root node is red")]
    RedRoot,

    #[error("red node {0} has a red child")]
    RedChild(String),

    #[error("black height differs between the subtrees of {0}")]
    BlackHeight(String),

    #[error("node {node} caches max {cached}, its subtree max is {actual}")]
    MaxEndpoint {
        node: String,
        cached: String,
        actual: String,
    },

    #[error("node {0} is out of low-endpoint order")]
    Order(String),

    #[error("parent link of node {0} is inconsistent")]
    ParentLink(String),

    #[error("tree reports {expected} nodes but {found} are reachable")]
    Length { expected: usize, found: usize },
}
