//! The `Node` capability shared by every emittable construct.
//!
//! Constructs never talk to each other's concrete types. A composite
//! construct hands its children to [`Writer::write_node`] and a leaf
//! construct writes literal tokens; the writer never asks which is which.

use super::Writer;

/// Trait for constructs that can write themselves into a [`Writer`].
///
/// Writing the same node twice appends its text twice. That is the
/// caller's concern; an implementation must still leave indentation
/// balanced and only touch the import registries through
/// [`Writer::add_import`] and [`Writer::add_reference`].
pub trait Node {
    /// Append this construct to the writer.
    fn write(&self, writer: &mut Writer);
}

/// Blanket implementation for references.
impl<T: Node + ?Sized> Node for &T {
    fn write(&self, writer: &mut Writer) {
        (**self).write(writer)
    }
}

/// Blanket implementation for Box.
impl<T: Node + ?Sized> Node for Box<T> {
    fn write(&self, writer: &mut Writer) {
        self.as_ref().write(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Semicolon;

    impl Node for Semicolon {
        fn write(&self, writer: &mut Writer) {
            writer.write(";");
        }
    }

    #[test]
    fn test_boxed_node_dispatches() {
        let nodes: Vec<Box<dyn Node>> = vec![Box::new(Semicolon), Box::new(Semicolon)];
        let mut writer = Writer::nested("com.example");
        for node in &nodes {
            writer.write_node(node);
        }
        assert_eq!(writer.body(), ";;");
    }

    #[test]
    fn test_reference_node_dispatches() {
        let node = Semicolon;
        let by_ref = &node;
        let mut writer = Writer::nested("com.example");
        writer.write_node(&by_ref);
        assert_eq!(writer.body(), ";");
    }
}
