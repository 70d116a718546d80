pub mod editor;
pub mod page;
pub mod problem;
pub mod solution_file;
pub mod test_run;
pub mod user;
pub mod wizard;
