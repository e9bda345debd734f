// ABOUTME: SQL statements shared by the SQLite and PostgreSQL providers
// ABOUTME: Placeholders use $n numbering, which both drivers accept
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

// Employees

/// Total employee rows
pub const COUNT_EMPLOYEES: &str = "SELECT COUNT(*) FROM tbl_funcionarios";

/// One page of employees by ascending id: `$1` limit, `$2` offset
pub const LIST_EMPLOYEES: &str = r"
    SELECT id_funcionario, nome, email, cpf, cargo
    FROM tbl_funcionarios
    ORDER BY id_funcionario ASC
    LIMIT $1 OFFSET $2
";

/// Employee by id, without the password column
pub const GET_EMPLOYEE: &str = r"
    SELECT id_funcionario, nome, email, cpf, cargo
    FROM tbl_funcionarios
    WHERE id_funcionario = $1
";

/// Employee whose email and password both match exactly
pub const FIND_EMPLOYEE_BY_CREDENTIALS: &str = r"
    SELECT id_funcionario, nome, email, cpf, cargo
    FROM tbl_funcionarios
    WHERE email = $1 AND senha = $2
    ORDER BY id_funcionario ASC
    LIMIT 1
";

/// Whether any employee holds the CPF
pub const EMPLOYEE_CPF_EXISTS: &str =
    "SELECT EXISTS(SELECT 1 FROM tbl_funcionarios WHERE cpf = $1)";

/// Insert an employee and return the stored row
pub const INSERT_EMPLOYEE: &str = r"
    INSERT INTO tbl_funcionarios (nome, senha, email, cpf, cargo)
    VALUES ($1, $2, $3, $4, $5)
    RETURNING id_funcionario, nome, email, cpf, cargo
";

/// Full replace of name, email, CPF and role; password untouched
pub const UPDATE_EMPLOYEE: &str = r"
    UPDATE tbl_funcionarios
    SET nome = $1, email = $2, cpf = $3, cargo = $4
    WHERE id_funcionario = $5
";

/// Remove an employee by id
pub const DELETE_EMPLOYEE: &str = "DELETE FROM tbl_funcionarios WHERE id_funcionario = $1";

// Motorcycles

/// Total motorcycle rows
pub const COUNT_MOTORCYCLES: &str = "SELECT COUNT(*) FROM tbl_moto";

/// One page of motorcycles by ascending chassis: `$1` limit, `$2` offset
pub const LIST_MOTORCYCLES: &str = r"
    SELECT chassi, placa, id_vaga, modelo, status, descricao
    FROM tbl_moto
    ORDER BY chassi ASC
    LIMIT $1 OFFSET $2
";

/// Inclusive-or match; a NULL filter never matches
pub const FIND_MOTORCYCLE: &str = r"
    SELECT chassi, placa, id_vaga, modelo, status, descricao
    FROM tbl_moto
    WHERE ($1 IS NOT NULL AND chassi = $1)
       OR ($2 IS NOT NULL AND placa = $2)
    ORDER BY chassi ASC, placa ASC
    LIMIT 1
";

/// Motorcycle by exact chassis and plate
pub const GET_MOTORCYCLE: &str = r"
    SELECT chassi, placa, id_vaga, modelo, status, descricao
    FROM tbl_moto
    WHERE chassi = $1 AND placa = $2
";

/// Whether any motorcycle has the chassis
pub const MOTORCYCLE_CHASSIS_EXISTS: &str =
    "SELECT EXISTS(SELECT 1 FROM tbl_moto WHERE chassi = $1)";

/// Whether any motorcycle has the plate
pub const MOTORCYCLE_PLATE_EXISTS: &str =
    "SELECT EXISTS(SELECT 1 FROM tbl_moto WHERE placa = $1)";

/// Insert a motorcycle under its caller-assigned key
pub const INSERT_MOTORCYCLE: &str = r"
    INSERT INTO tbl_moto (chassi, placa, id_vaga, modelo, status, descricao)
    VALUES ($1, $2, $3, $4, $5, $6)
";

/// Overwrite the non-key columns of the row at (`$5`, `$6`)
pub const UPDATE_MOTORCYCLE: &str = r"
    UPDATE tbl_moto
    SET id_vaga = $1, modelo = $2, status = $3, descricao = $4
    WHERE chassi = $5 AND placa = $6
";

/// Remove a motorcycle by its composite key
pub const DELETE_MOTORCYCLE: &str = "DELETE FROM tbl_moto WHERE chassi = $1 AND placa = $2";

// Health

/// Readiness check query
pub const PING: &str = "SELECT 1";
