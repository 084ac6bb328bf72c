pub mod calculator;
pub mod demo;
pub mod report;
pub mod runner;
