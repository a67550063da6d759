pub mod frame_log;
