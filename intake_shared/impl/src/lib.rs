pub mod captcha;
pub mod language;
pub mod subscription;
