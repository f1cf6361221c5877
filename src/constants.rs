// Server configuration
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "3000";
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:8080";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

// Resource paths, relative to the API base URL
pub const CATEGORIES_API_PATH: &str = "api/categories";
pub const ENTRIES_API_PATH: &str = "api/entries";

// Route segments
pub const NEW_SEGMENT: &str = "new";
pub const EDIT_SEGMENT: &str = "edit";

// Validation limits
pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_CATEGORY_NAME_LENGTH: usize = 100;
pub const MAX_ENTRY_NAME_LENGTH: usize = 255;

// Form titles
pub const DEFAULT_CREATION_TITLE: &str = "Novo";
pub const DEFAULT_EDITION_TITLE: &str = "Edição";

// User-facing messages
pub const MSG_SUBMIT_SUCCESS: &str = "Solicitação processada com sucesso!";
pub const MSG_SUBMIT_ERROR: &str = "Ocorreu um erro ao processar a sua solicitação";
pub const MSG_LOAD_ERROR: &str = "Ocorreu um erro no servidor, tente mais tarde.";
pub const MSG_COMMUNICATION_FAILURE: &str =
    "Falha na comunicação com o servidor. Por favor, tente mais tarde.";
pub const MSG_INVALID_FORM_VALUE: &str = "Os dados informados no formulário são inválidos.";
pub const MSG_LIST_LOAD_ERROR: &str = "Erro ao carregar a lista";
pub const MSG_DELETE_CONFIRM: &str = "Deseja realmente excluir este item?";
pub const MSG_DELETE_ERROR: &str = "Erro ao tentar excluir!";

// Field error messages
pub const ERR_FIELD_REQUIRED: &str = "O campo é obrigatório";
pub const ERR_FIELD_EMAIL: &str = "Formato de e-mail inválido";

// Server-side error messages
pub const ERR_NOT_FOUND: &str = "Resource not found";
pub const ERR_CATEGORY_IN_USE: &str = "Cannot delete category: it has associated entries";
