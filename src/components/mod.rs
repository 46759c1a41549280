pub mod ego_graph;
