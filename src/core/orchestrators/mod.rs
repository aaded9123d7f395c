pub mod text_extraction_orchestrator;
