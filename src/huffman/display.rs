use std::fmt;

use super::{HuffmanTree, Node, NodeKind, Symbol};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL: &str = "│   ";
const SPACE: &str = "    ";

// Node & Tree visualization
impl<S: Symbol> Node<S> {
    fn label(&self) -> String {
        let description = match self.symbol() {
            Some(symbol) => format!("{:?} ({})", symbol, self.frequency()),
            None => format!("node ({})", self.frequency()),
        };
        if self.prefix().is_empty() {
            description
        } else {
            format!("{} {}", self.prefix(), description)
        }
    }

    fn get_string(&self, tree: &HuffmanTree<S>) -> Vec<String> {
        let mut result = vec![self.label()];
        if let NodeKind::Inner { left, right } = *self.kind() {
            for (index, connector, continuation) in
                [(left, BRANCH, VERTICAL), (right, LAST_BRANCH, SPACE)]
            {
                let Some(child) = tree.node(index) else {
                    continue;
                };
                for (line_number, line) in child.get_string(tree).into_iter().enumerate() {
                    let lead = if line_number == 0 {
                        connector
                    } else {
                        continuation
                    };
                    result.push(format!("{}{}", lead, line));
                }
            }
        }
        result
    }
}

impl<S: Symbol> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root() else {
            return Ok(());
        };
        for s in root.get_string(self).iter() {
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}
