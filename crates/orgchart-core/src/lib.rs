//! Orgchart Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Orgchart layout
//! engine and its command-line front end. It includes:
//!
//! - **Identifiers**: Numeric node identifiers ([`identifier::NodeId`])
//! - **Tree**: The input organization tree ([`tree::TreeNode`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)

pub mod color;
pub mod geometry;
pub mod identifier;
pub mod tree;
