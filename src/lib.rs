//! In-memory leave management exposed as an MCP server.

pub mod mcp;
