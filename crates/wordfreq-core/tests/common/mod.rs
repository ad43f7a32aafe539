pub mod text_server;
