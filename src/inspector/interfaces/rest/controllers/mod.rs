pub mod inspector_rest_controller;
