pub mod struct_meta;
