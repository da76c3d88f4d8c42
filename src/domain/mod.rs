//! Mock tool implementations
//!
//! Provides the fixed tool catalog exposed over the MCP protocol.

pub mod tools;
