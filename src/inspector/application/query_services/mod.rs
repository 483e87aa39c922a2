pub mod inspector_query_service_impl;
