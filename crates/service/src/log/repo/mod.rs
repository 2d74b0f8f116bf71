pub mod seaorm;

pub use seaorm::SeaOrmLogRepository;
