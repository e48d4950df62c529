pub mod track_remote;
