use std::time::Duration;

#[derive(Default)]
pub struct Timings {
    pub lex_time: Duration,
    pub parse_time: Duration,
    pub total_time: Duration,
}

impl Timings {
    pub fn emit(&self) {
        eprintln!("=====================");
        eprintln!("RCC TRANSLATION TIMINGS:");
        eprintln!("=====================");

        eprintln!("lex duration: {:#?}", self.lex_time);
        eprintln!("parse duration: {:#?}", self.parse_time);
        eprintln!("total duration: {:#?}", self.total_time);

        eprintln!("=====================");
    }
}
