pub mod stage1_load;
pub mod stage2_filter;
pub mod stage3_correlate;
pub mod stage4_write;
