pub mod central_api;
