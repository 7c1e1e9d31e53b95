//! JSON snapshots of parsed files.
//!
//! An external parser writes one snapshot per file (or an array of them per
//! document). Nodes are listed flat and refer to each other by position in
//! the `nodes` array:
//!
//! ```json
//! {
//!   "fileName": "src/a.ts",
//!   "text": "class Foo {}",
//!   "root": 3,
//!   "nodes": [
//!     { "kind": "Identifier", "pos": 6, "end": 9, "text": "Foo" },
//!     { "kind": "ClassDeclaration", "pos": 0, "end": 12, "name": 0, "children": [0] },
//!     { "kind": "SyntaxList", "pos": 0, "end": 12, "children": [1] },
//!     { "kind": "SourceFile", "pos": 0, "end": 12, "children": [2] }
//!   ]
//! }
//! ```
//!
//! Loading validates that the nodes form a tree rooted at `root` (every index
//! in range, at most one parent per node, no parent for the root), that every
//! payload index (`name`, `expression`, `declarationList`, `declarations`) is
//! one of the node's own `children`, and that spans lie inside the text.
//! Parent links are derived from `children`.
//!
//! `pos` and `end` are UTF-8 byte offsets into `text` and must fall on
//! character boundaries. Producers working from UTF-16 positions (as the
//! TypeScript compiler reports them) must convert first.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arena::NodeArena;
use crate::kind::SyntaxKind;
use crate::node::{Node, NodeData, NodeIndex};
use crate::source_file::SourceFile;
use crate::tree::SyntaxTree;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSnapshot {
    pub file_name: String,
    pub text: String,
    #[serde(default)]
    pub has_no_default_lib: bool,
    pub root: u32,
    pub nodes: Vec<NodeSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSnapshot {
    pub kind: SyntaxKind,
    pub pos: u32,
    pub end: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<u32>,
    /// Identifier text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Declaration name node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<u32>,
    /// Left side of a property access
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration_list: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declarations: Option<Vec<u32>>,
}

/// A snapshot document holds one file or an array of files.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SnapshotDocument {
    Many(Vec<FileSnapshot>),
    One(FileSnapshot),
}

#[derive(Debug)]
pub enum SnapshotError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    /// `root` is not an index into `nodes`.
    RootOutOfRange { file: String, root: u32 },
    /// A node refers to an index outside `nodes`.
    DanglingReference { file: String, node: u32, target: u32 },
    InvalidSpan {
        file: String,
        node: u32,
        pos: u32,
        end: u32,
    },
    /// A node is listed as the child of more than one node, or the root is
    /// listed as a child.
    NotATree { file: String, node: u32 },
    /// A payload field (`name`, `expression`, ...) names a node that is not
    /// among the node's own `children`.
    RoleNotChild { file: String, node: u32, role: u32 },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Io { path, source } => {
                write!(f, "cannot read snapshot {}: {source}", path.display())
            }
            SnapshotError::Json {
                path: Some(path),
                source,
            } => write!(f, "malformed snapshot {}: {source}", path.display()),
            SnapshotError::Json { path: None, source } => {
                write!(f, "malformed snapshot: {source}")
            }
            SnapshotError::RootOutOfRange { file, root } => {
                write!(f, "{file}: root node {root} does not exist")
            }
            SnapshotError::DanglingReference { file, node, target } => {
                write!(f, "{file}: node {node} refers to missing node {target}")
            }
            SnapshotError::InvalidSpan {
                file,
                node,
                pos,
                end,
            } => write!(f, "{file}: node {node} has invalid span {pos}..{end}"),
            SnapshotError::NotATree { file, node } => {
                write!(
                    f,
                    "{file}: node {node} is listed under more than one parent or is the root"
                )
            }
            SnapshotError::RoleNotChild { file, node, role } => {
                write!(f, "{file}: node {node} refers to node {role}, which is not its child")
            }
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Io { source, .. } => Some(source),
            SnapshotError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Read and validate every file in a snapshot document.
pub fn load_snapshots(path: &Path) -> Result<Vec<SourceFile>, SnapshotError> {
    let json = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: SnapshotDocument =
        serde_json::from_str(&json).map_err(|source| SnapshotError::Json {
            path: Some(path.to_path_buf()),
            source,
        })?;
    let files = into_files(document)?;
    debug!(path = %path.display(), files = files.len(), "loaded snapshot");
    Ok(files)
}

/// Parse and validate a snapshot document held in memory.
pub fn parse_snapshots(json: &str) -> Result<Vec<SourceFile>, SnapshotError> {
    let document: SnapshotDocument =
        serde_json::from_str(json).map_err(|source| SnapshotError::Json { path: None, source })?;
    into_files(document)
}

fn into_files(document: SnapshotDocument) -> Result<Vec<SourceFile>, SnapshotError> {
    match document {
        SnapshotDocument::One(file) => Ok(vec![file.into_source_file()?]),
        SnapshotDocument::Many(files) => files
            .into_iter()
            .map(FileSnapshot::into_source_file)
            .collect(),
    }
}

impl FileSnapshot {
    /// Validate the node list and build the arena.
    pub fn into_source_file(self) -> Result<SourceFile, SnapshotError> {
        let FileSnapshot {
            file_name,
            text,
            has_no_default_lib,
            root,
            nodes,
        } = self;
        let count = nodes.len() as u32;
        let text_len = text.len() as u32;

        if root >= count {
            return Err(SnapshotError::RootOutOfRange {
                file: file_name,
                root,
            });
        }

        let mut has_parent = vec![false; nodes.len()];
        for (i, node) in nodes.iter().enumerate() {
            let i = i as u32;
            if node.pos > node.end
                || node.end > text_len
                || !text.is_char_boundary(node.pos as usize)
                || !text.is_char_boundary(node.end as usize)
            {
                return Err(SnapshotError::InvalidSpan {
                    file: file_name,
                    node: i,
                    pos: node.pos,
                    end: node.end,
                });
            }
            if let Some(target) = node.references().find(|&target| target >= count) {
                return Err(SnapshotError::DanglingReference {
                    file: file_name,
                    node: i,
                    target,
                });
            }
            if let Some(role) = node.roles().find(|role| !node.children.contains(role)) {
                return Err(SnapshotError::RoleNotChild {
                    file: file_name,
                    node: i,
                    role,
                });
            }
            for &child in &node.children {
                let seen = &mut has_parent[child as usize];
                if *seen || child == root {
                    return Err(SnapshotError::NotATree {
                        file: file_name,
                        node: child,
                    });
                }
                *seen = true;
            }
        }

        let mut arena = NodeArena::with_capacity(nodes.len());
        for node in nodes {
            let data = node.data();
            arena.add(
                Node::new(node.kind, node.pos, node.end)
                    .with_children(node.children.into_iter().map(NodeIndex).collect())
                    .with_data(data),
            );
        }
        arena.link_parents();

        Ok(SourceFile::new(file_name, text, arena, NodeIndex(root))
            .with_no_default_lib(has_no_default_lib))
    }

    /// Snapshot an existing file. Loading the result yields an equal tree.
    pub fn from_source_file(file: &SourceFile) -> FileSnapshot {
        let nodes = file
            .arena()
            .iter()
            .map(|(_, node)| NodeSnapshot::from_node(node))
            .collect();
        FileSnapshot {
            file_name: file.file_name().to_string(),
            text: file.text().to_string(),
            has_no_default_lib: file.has_no_default_lib(),
            root: file.root().0,
            nodes,
        }
    }
}

impl NodeSnapshot {
    /// Every node index this node mentions.
    fn references(&self) -> impl Iterator<Item = u32> + '_ {
        self.children.iter().copied().chain(self.roles())
    }

    /// Indices named by the payload fields.
    fn roles(&self) -> impl Iterator<Item = u32> + '_ {
        self.name
            .into_iter()
            .chain(self.expression)
            .chain(self.declaration_list)
            .chain(self.declarations.iter().flatten().copied())
    }

    fn data(&self) -> NodeData {
        if let Some(text) = &self.text {
            return NodeData::Identifier { text: text.clone() };
        }
        if let (Some(expression), Some(name)) = (self.expression, self.name) {
            return NodeData::PropertyAccess {
                expression: NodeIndex(expression),
                name: NodeIndex(name),
            };
        }
        if let Some(name) = self.name {
            return NodeData::Named {
                name: NodeIndex(name),
            };
        }
        if let Some(list) = self.declaration_list {
            return NodeData::VariableStatement {
                declaration_list: NodeIndex(list),
            };
        }
        if let Some(declarations) = &self.declarations {
            return NodeData::VariableDeclarationList {
                declarations: declarations.iter().copied().map(NodeIndex).collect(),
            };
        }
        NodeData::None
    }

    fn from_node(node: &Node) -> NodeSnapshot {
        let mut snapshot = NodeSnapshot {
            kind: node.kind,
            pos: node.pos,
            end: node.end,
            children: node.children.iter().map(|child| child.0).collect(),
            text: None,
            name: None,
            expression: None,
            declaration_list: None,
            declarations: None,
        };
        match &node.data {
            NodeData::None => {}
            NodeData::Identifier { text } => snapshot.text = Some(text.clone()),
            NodeData::Named { name } => snapshot.name = Some(name.0),
            NodeData::PropertyAccess { expression, name } => {
                snapshot.expression = Some(expression.0);
                snapshot.name = Some(name.0);
            }
            NodeData::VariableStatement { declaration_list } => {
                snapshot.declaration_list = Some(declaration_list.0);
            }
            NodeData::VariableDeclarationList { declarations } => {
                snapshot.declarations = Some(declarations.iter().map(|d| d.0).collect());
            }
        }
        snapshot
    }
}
