/// A key-value pair stored in a node of a binary search tree.
#[derive(Debug, PartialEq)]
pub struct Entry<T, U> {
    pub key: T,
    pub value: U,
}
