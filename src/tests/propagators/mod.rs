mod arc_consistency;
mod node_consistency;
