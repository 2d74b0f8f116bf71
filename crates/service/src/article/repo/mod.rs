pub mod seaorm;

pub use seaorm::SeaOrmArticleRepository;
