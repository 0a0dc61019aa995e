pub mod instance_files;
pub mod solution_files;

mod table;

pub use instance_files::read_instance;
pub use solution_files::read_solution;
