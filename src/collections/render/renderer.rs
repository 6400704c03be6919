use std::fmt::Debug;

use derive_more::IsVariant;

use crate::collections::heap::Heap;
use crate::collections::heap::ops::{left, right};

/// The built-in styles a [`TreeRenderer`] can be created from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Style {
    /// Box-drawing characters: `├── `, `└── ` and `│`.
    #[default]
    Default,
    /// Plain ASCII: `+--- `, `'--- ` and `|`.
    Ascii,
}

/// Renders the implicit binary tree of a heap's storage as lines of text, one node per line.
///
/// Each line is made of a prefix, a connector and the node itself. The root has no connector, the
/// last child of a node gets the `bend` connector and every other child the `split` connector.
/// Below a child that isn't the last, the prefix continues with `vert` so the line to the next
/// sibling stays connected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRenderer {
    pub bend: String,
    pub split: String,
    pub vert: String,
}

impl TreeRenderer {
    /// Creates a renderer with the provided connectors.
    pub fn new(bend: impl Into<String>, split: impl Into<String>, vert: impl Into<String>) -> Self {
        TreeRenderer {
            bend: bend.into(),
            split: split.into(),
            vert: vert.into(),
        }
    }

    /// Creates a renderer using one of the built-in styles.
    pub fn from_style(style: Style) -> Self {
        match style {
            Style::Default => TreeRenderer::new("└── ", "├── ", "│"),
            Style::Ascii => TreeRenderer::new("'--- ", "+--- ", "|"),
        }
    }

    /// Renders `storage` as a tree, using [`Debug`] for each node.
    pub fn render<T: Debug>(&self, storage: &[T]) -> String {
        self.render_with(storage, |node| format!("{node:?}"))
    }

    /// Renders `storage` as a tree, using `node_style` to turn each node into text. An empty
    /// slice renders as an empty string.
    pub fn render_with<T, F>(&self, storage: &[T], node_style: F) -> String
    where
        F: Fn(&T) -> String,
    {
        let mut lines = Vec::with_capacity(storage.len());
        if !storage.is_empty() {
            self.push_lines(storage, &node_style, 0, String::new(), true, true, &mut lines);
        }
        lines.join("\n")
    }

    #[allow(clippy::too_many_arguments)]
    fn push_lines<T, F>(
        &self,
        storage: &[T],
        node_style: &F,
        index: usize,
        prefix: String,
        last: bool,
        is_root: bool,
        lines: &mut Vec<String>,
    ) where
        F: Fn(&T) -> String,
    {
        let connector = match (is_root, last) {
            (true, _) => "",
            (false, true) => self.bend.as_str(),
            (false, false) => self.split.as_str(),
        };

        lines.push(format!("{prefix}{connector}{}", node_style(&storage[index])));

        let width = connector.chars().count();
        let child_prefix = if last {
            format!("{prefix}{}", " ".repeat(width))
        } else {
            format!("{prefix}{}{}", self.vert, " ".repeat(width.saturating_sub(1)))
        };

        let children: Vec<usize> = [left(index), right(index)]
            .into_iter()
            .filter(|&c| c < storage.len())
            .collect();

        for (i, &child) in children.iter().enumerate() {
            let last_child = i == children.len() - 1;
            self.push_lines(
                storage,
                node_style,
                child,
                child_prefix.clone(),
                last_child,
                false,
                lines,
            );
        }
    }
}

impl Default for TreeRenderer {
    fn default() -> Self {
        TreeRenderer::from_style(Style::Default)
    }
}

impl From<Style> for TreeRenderer {
    fn from(value: Style) -> Self {
        TreeRenderer::from_style(value)
    }
}

impl<T: Debug, C> Heap<T, C> {
    /// Renders the heap as a tree using the default style. Rendering never changes the heap.
    pub fn ascii_tree(&self) -> String {
        self.render(&TreeRenderer::default())
    }

    /// Renders the heap as a tree using the provided renderer.
    pub fn render(&self, renderer: &TreeRenderer) -> String {
        renderer.render(self.as_slice())
    }
}
