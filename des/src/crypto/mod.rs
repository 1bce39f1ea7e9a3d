pub mod des;
pub mod des_tables;
pub mod key_schedule;
pub mod round_function;
pub mod triple_des;
