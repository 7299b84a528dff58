pub mod lead_intake;
