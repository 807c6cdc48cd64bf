pub mod setup_fpm_filename;
pub mod setup_fpm_install;
pub mod setup_fpm_resolve;
