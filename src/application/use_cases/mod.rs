/// Use cases module containing application business logic orchestration
mod check_build;

pub use check_build::CheckBuildUseCase;
