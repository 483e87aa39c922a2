pub mod inspector_command_service_impl;
