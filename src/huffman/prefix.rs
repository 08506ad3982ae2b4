use super::observer::{NoopObserver, TreeObserver};
use super::{HuffmanTree, Symbol};

pub fn assign_prefixes<S: Symbol>(tree: &mut HuffmanTree<S>, root_index: usize) {
    assign_prefixes_observed(tree, root_index, &mut NoopObserver);
}

/// Stores on every node below `root_index` its path from that node, `0` for
/// each left step and `1` for each right step. Nodes are visited in pre-order.
/// An index outside the tree visits nothing.
pub fn assign_prefixes_observed<S, O>(
    tree: &mut HuffmanTree<S>,
    root_index: usize,
    observer: &mut O,
)
where
    S: Symbol,
    O: TreeObserver<S> + ?Sized,
{
    let mut pending = vec![(root_index, String::new())];
    while let Some((index, prefix)) = pending.pop() {
        let Some(node) = tree.node_mut(index) else {
            continue;
        };
        if let (Some(left), Some(right)) = (node.left(), node.right()) {
            pending.push((right, format!("{}1", prefix)));
            pending.push((left, format!("{}0", prefix)));
        }
        node.set_prefix(prefix);
        observer.prefix_assigned(tree, index);
    }
}

#[cfg(test)]
mod test {
    use super::{assign_prefixes, assign_prefixes_observed};
    use crate::huffman::{
        build_tree, build_worklist, FrequencyMap, HuffmanTree, Node, TreeObserver,
    };

    fn labelled_tree(frequencies: &[(char, usize)]) -> HuffmanTree<char> {
        let frequencies: FrequencyMap<char> = frequencies.iter().copied().collect();
        let mut tree = build_tree(build_worklist(&frequencies).unwrap()).unwrap();
        let root_index = tree.root_index();
        assign_prefixes(&mut tree, root_index);
        tree
    }

    fn prefixes(tree: &HuffmanTree<char>) -> Vec<&str> {
        tree.nodes().iter().map(Node::prefix).collect()
    }

    #[test]
    fn test_assign_prefixes_on_root_first_tree() {
        let mut tree = HuffmanTree::from_nodes(vec![
            Node::inner(3, 1, 2),
            Node::leaf('a', 1),
            Node::leaf('b', 2),
        ]);
        assign_prefixes(&mut tree, 0);
        assert_eq!(prefixes(&tree), vec!["", "0", "1"]);
    }

    #[test]
    fn test_assign_prefixes_labels_leaves_and_inner_nodes() {
        let tree = labelled_tree(&[('a', 4), ('b', 2), ('c', 1)]);
        assert_eq!(prefixes(&tree), vec!["00", "01", "0", "1", ""]);
        assert_eq!(tree.codeword(&'a'), Some("1"));
        assert_eq!(tree.codeword(&'b'), Some("01"));
        assert_eq!(tree.codeword(&'c'), Some("00"));
    }

    #[test]
    fn test_assigned_codewords_are_prefix_free() {
        let tree = labelled_tree(&[
            ('a', 45),
            ('b', 13),
            ('c', 12),
            ('d', 16),
            ('e', 9),
            ('f', 5),
        ]);
        let codewords: Vec<&str> = tree.leaves().map(Node::prefix).collect();
        for (i, first) in codewords.iter().enumerate() {
            assert!(!first.is_empty());
            for (j, second) in codewords.iter().enumerate() {
                if i != j {
                    assert!(
                        !second.starts_with(first),
                        "{} is a prefix of {}",
                        first,
                        second
                    );
                }
            }
        }
    }

    #[test]
    fn test_inner_prefix_is_prefix_of_children() {
        let tree = labelled_tree(&[('a', 5), ('b', 2), ('r', 2), ('c', 1), ('d', 1)]);
        for node in tree.nodes() {
            if let (Some(left), Some(right)) = (node.left(), node.right()) {
                assert_eq!(tree.nodes()[left].prefix(), format!("{}0", node.prefix()));
                assert_eq!(tree.nodes()[right].prefix(), format!("{}1", node.prefix()));
            }
        }
    }

    #[test]
    fn test_assign_prefixes_with_index_out_of_range() {
        let mut tree = HuffmanTree::from_nodes(vec![
            Node::leaf('a', 1),
            Node::leaf('b', 1),
            Node::inner(2, 0, 1),
        ]);
        assign_prefixes(&mut tree, 7);
        assert!(tree.nodes().iter().all(|node| node.prefix().is_empty()));
    }

    #[derive(Default)]
    struct VisitRecorder {
        visited: Vec<usize>,
    }

    impl TreeObserver<char> for VisitRecorder {
        fn prefix_assigned(&mut self, _tree: &HuffmanTree<char>, index: usize) {
            self.visited.push(index);
        }
    }

    #[test]
    fn test_assign_prefixes_visits_in_pre_order() {
        let frequencies = FrequencyMap::from([('a', 4), ('b', 2), ('c', 1)]);
        let mut tree = build_tree(build_worklist(&frequencies).unwrap()).unwrap();
        let mut recorder = VisitRecorder::default();
        let root_index = tree.root_index();
        assign_prefixes_observed(&mut tree, root_index, &mut recorder);
        assert_eq!(recorder.visited, vec![4, 2, 0, 1, 3]);
    }
}
