pub mod d400_finance_summary;
