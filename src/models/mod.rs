pub mod block;
pub mod class_record;
pub mod day;
pub mod section_group;
