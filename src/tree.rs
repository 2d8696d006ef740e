//! Path tree builder: groups flat records carrying delimited path strings
//! into a forest of nested nodes, de-duplicating siblings by path segment.

use serde_json::{Map, Value};
use termtree::Tree;
use tracing::instrument;

/// Constructs hierarchical forests from flat record lists.
///
/// Records are JSON objects carrying a delimited path string (e.g. `"a.b.c"`)
/// in the field named by `path_key`. Each path component becomes a tree node:
/// a shallow copy of the originating record with the component stored under
/// `segment_key` and a child array stored under `children_key`. Within any
/// sibling list, segment values are unique; a record sharing a path prefix
/// extends the existing node instead of duplicating it.
///
/// The first record to create a node wins its copied fields. Records with an
/// empty, missing, or non-string path are dropped silently. A record field
/// named like `segment_key` or `children_key` is overwritten at
/// node-creation time.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    path_key: String,
    segment_key: String,
    children_key: String,
    delimiter: String,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            path_key: "path".to_string(),
            segment_key: "segment".to_string(),
            children_key: "children".to_string(),
            delimiter: ".".to_string(),
        }
    }

    /// Field on a source record holding the delimited path string.
    pub fn with_path_key(mut self, key: &str) -> Self {
        self.path_key = key.to_string();
        self
    }

    /// Field on a tree node holding the node's path component.
    pub fn with_segment_key(mut self, key: &str) -> Self {
        self.segment_key = key.to_string();
        self
    }

    /// Field on a tree node holding the child list.
    pub fn with_children_key(mut self, key: &str) -> Self {
        self.children_key = key.to_string();
        self
    }

    pub fn with_delimiter(mut self, delimiter: &str) -> Self {
        self.delimiter = delimiter.to_string();
        self
    }

    /// Build a forest from `records`.
    ///
    /// Walks each record's path front to back, descending through existing
    /// nodes whose segment matches (case-sensitive, exact) and creating the
    /// rest. Never errors: malformed records degrade to an incomplete forest.
    #[instrument(level = "debug", skip(self, records))]
    pub fn build(&self, records: &[Value]) -> Vec<Value> {
        let mut forest: Vec<Value> = Vec::new();

        for record in records {
            let Some(obj) = record.as_object() else {
                continue;
            };
            let segments: Vec<&str> = match obj.get(&self.path_key).and_then(Value::as_str) {
                Some(path) if !path.is_empty() => path.split(self.delimiter.as_str()).collect(),
                _ => continue,
            };
            self.attach(&mut forest, obj, &segments);
        }

        forest
    }

    /// Descend into `siblings`, creating nodes for unmatched segments.
    fn attach(&self, siblings: &mut Vec<Value>, record: &Map<String, Value>, segments: &[&str]) {
        let Some((head, rest)) = segments.split_first() else {
            return;
        };

        let position = siblings
            .iter()
            .position(|node| node.get(&self.segment_key).and_then(Value::as_str) == Some(*head));

        let index = match position {
            Some(index) => index,
            None => {
                let mut node = record.clone();
                node.insert(self.segment_key.clone(), Value::String((*head).to_string()));
                node.insert(self.children_key.clone(), Value::Array(Vec::new()));
                siblings.push(Value::Object(node));
                siblings.len() - 1
            }
        };

        if rest.is_empty() {
            return;
        }
        if let Some(children) = siblings[index]
            .get_mut(&self.children_key)
            .and_then(Value::as_array_mut)
        {
            self.attach(children, record, rest);
        }
    }

    /// Longest root-to-leaf chain in the forest, 0 for an empty forest.
    #[instrument(level = "trace", skip(self, forest))]
    pub fn depth(&self, forest: &[Value]) -> usize {
        forest
            .iter()
            .map(|node| self.node_depth(node))
            .max()
            .unwrap_or(0)
    }

    fn node_depth(&self, node: &Value) -> usize {
        1 + self
            .children_of(node)
            .iter()
            .map(|child| self.node_depth(child))
            .max()
            .unwrap_or(0)
    }

    /// Segment values of all leaf nodes, left to right.
    #[instrument(level = "trace", skip(self, forest))]
    pub fn leaves(&self, forest: &[Value]) -> Vec<String> {
        let mut leaves = Vec::new();
        for node in forest {
            self.collect_leaves(node, &mut leaves);
        }
        leaves
    }

    fn collect_leaves(&self, node: &Value, leaves: &mut Vec<String>) {
        let children = self.children_of(node);
        if children.is_empty() {
            if let Some(segment) = node.get(&self.segment_key).and_then(Value::as_str) {
                leaves.push(segment.to_string());
            }
        } else {
            for child in children {
                self.collect_leaves(child, leaves);
            }
        }
    }

    /// Flatten a forest back to flat records.
    ///
    /// Every node yields one record: its own fields minus the child list,
    /// with the full delimited path restored under the path field. Building
    /// a forest from the flattened output reproduces the same segment sets
    /// at every level.
    #[instrument(level = "trace", skip(self, forest))]
    pub fn flatten(&self, forest: &[Value]) -> Vec<Value> {
        let mut records = Vec::new();
        for node in forest {
            self.collect_records(node, &[], &mut records);
        }
        records
    }

    fn collect_records(&self, node: &Value, prefix: &[&str], records: &mut Vec<Value>) {
        let Some(obj) = node.as_object() else {
            return;
        };
        let Some(segment) = obj.get(&self.segment_key).and_then(Value::as_str) else {
            return;
        };

        let mut path: Vec<&str> = prefix.to_vec();
        path.push(segment);

        let mut record = obj.clone();
        record.remove(&self.children_key);
        record.insert(
            self.path_key.clone(),
            Value::String(path.join(&self.delimiter)),
        );
        records.push(Value::Object(record));

        for child in self.children_of(node) {
            self.collect_records(child, &path, records);
        }
    }

    /// Render the forest as an ASCII tree, labelled by segment.
    pub fn render(&self, forest: &[Value]) -> String {
        forest
            .iter()
            .map(|node| self.to_tree_string(node).to_string())
            .collect::<Vec<_>>()
            .join("")
    }

    fn to_tree_string(&self, node: &Value) -> Tree<String> {
        let label = node
            .get(&self.segment_key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let leaves: Vec<_> = self
            .children_of(node)
            .iter()
            .map(|child| self.to_tree_string(child))
            .collect();

        Tree::new(label).with_leaves(leaves)
    }

    fn children_of<'a>(&self, node: &'a Value) -> &'a [Value] {
        node.get(&self.children_key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
