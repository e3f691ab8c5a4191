pub use alphabet::Allele;
pub use counts::AlleleCounts;

mod alphabet;
mod counts;
