pub mod sequence_statement;
