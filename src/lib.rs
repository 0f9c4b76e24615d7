pub mod graph;
pub mod cust_error;
pub mod problem;
pub mod solver;
pub mod exhaustive;
pub mod randomized;
pub mod greedy;

#[cfg(test)]
mod test_graphs;
