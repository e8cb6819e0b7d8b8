extern crate portugasm;

use std::path::PathBuf;
use std::{env, fs, process};

use portugasm::driver::translate_file_to;
use portugasm::error::TranslateError;
use portugasm::Direction::*;
use portugasm::OutputFormat::*;
use portugasm::translate;
use pretty_assertions::assert_eq;

const OLA_MUNDO_EXPECTED: &str = concat!(
    "section .data \n",
    "msg: db 'Ola mundo!', 10 \n",
    "tam: equ $-msg \n",
    "section .text \n",
    "global _start \n",
    "_start: \n",
    "mov eax, 4 \n",
    "mov ebx, 1 \n",
    "mov ecx, msg \n",
    "mov edx, tam \n",
    "syscall \n",
    "mov eax, 1 \n",
    "mov ebx, 0 \n",
    "syscall \n",
);

#[test]
fn ola_mundo() {
    let out = translate(include_str!("inputs/ola_mundo.asm"), ToCanonical, Default);
    assert_eq!(out, OLA_MUNDO_EXPECTED);
}

#[test]
fn ola_mundo_elf64() {
    // The standard table pairs the entry keyword itself, so the ELF64
    // special case produces the same text as the dictionary pass here.
    let out = translate(include_str!("inputs/ola_mundo.asm"), ToCanonical, Elf64);
    assert_eq!(out, OLA_MUNDO_EXPECTED);
}

#[test]
fn keyword_casing_is_ignored() {
    let out = translate(include_str!("inputs/maiusculas.asm"), ToCanonical, Default);
    assert_eq!(out, "section .text \nadd eax, ebx \nret \n");
}

#[test]
fn encode_direction_produces_dialect_text() {
    let out = translate("section .text\npush ebp\nret\n", ToLocalized, Default);
    assert_eq!(out, "secao .texto \ninsere ebp \nretorna \n");
}

#[test]
fn driver_writes_the_output_under_the_input_base_name() {
    let dir = temp_dir("driver");
    fs::create_dir_all(&dir).unwrap();

    let input = dir.join("exemplo.asm");
    fs::write(&input, "mover eax <- 1\n").unwrap();

    let out_dir = dir.join("build");
    let out_path = translate_file_to(&input, &out_dir, ToCanonical, Default).unwrap();
    assert_eq!(out_path, out_dir.join("exemplo.asm"));
    assert_eq!(fs::read_to_string(&out_path).unwrap(), "mov eax, 1 \n");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_input_is_a_fatal_open_error() {
    let dir = temp_dir("missing");
    let result = translate_file_to(
        &dir.join("nao_existe.asm"),
        &dir.join("build"),
        ToCanonical,
        Default,
    );

    match result {
        Err(TranslateError::InputOpen { path, .. }) => {
            assert_eq!(path, dir.join("nao_existe.asm"));
        }
        other => panic!("expected InputOpen, got {:?}", other.map(|p| p.display().to_string())),
    }

    // No output directory may appear before the input is readable.
    assert!(!dir.join("build").exists());
}

fn temp_dir(name: &str) -> PathBuf {
    env::temp_dir().join(format!("portugasm-{}-{}", name, process::id()))
}
