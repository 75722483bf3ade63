pub mod preview_probe_image;
