use php_obfuscator::config::ConfigError;
use php_obfuscator::errors::AppError;
use php_obfuscator::obfuscator::ObfuscationError;

#[test]
fn app_error_from_obfuscation_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::Other, "fail");
    let app: AppError = ObfuscationError::Io(io_err).into();
    assert!(matches!(app, AppError::Obfuscation(ObfuscationError::Io(_))));
}

#[test]
fn app_error_from_config_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let app: AppError = ConfigError::Io(io_err).into();
    assert!(matches!(app, AppError::Config(ConfigError::Io(_))));
}
