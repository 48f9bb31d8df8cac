pub mod system_dialogs;
